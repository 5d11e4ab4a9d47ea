// Plain observable value: holds the latest value and pushes every
// published value to its subscribers, in subscription order.

pub type Subscriber<T> = Box<dyn FnMut(&T)>;

pub struct Observable<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Registers `callback` and immediately calls it with the current value,
    /// so a freshly bound view starts in sync.
    pub fn subscribe<F>(&mut self, mut callback: F)
    where
        F: FnMut(&T) + 'static,
    {
        callback(&self.value);
        self.subscribers.push(Box::new(callback));
    }

    /// Replaces the value and notifies every subscriber, even when the new
    /// value equals the old one.
    pub fn publish(&mut self, value: T) {
        self.value = value;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
