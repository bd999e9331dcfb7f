use async_trait::async_trait;
use once_cell::sync::OnceCell;
use tokio::sync::Mutex;

/// A value created on first use by an async creator and shared afterwards.
///
/// Concurrent callers of [`InitOnce::get`] wait on the same creation; a failed
/// creation leaves the slot empty so the next caller retries.
pub(crate) struct InitOnce<T, Creator: AsyncCreator<T>> {
    creating: Mutex<()>,
    value: OnceCell<T>,
    creator: Creator,
}

#[async_trait]
pub(crate) trait AsyncCreator<T> {
    type Error;

    async fn create(&self) -> Result<T, Self::Error>;
}

impl<T, Creator: AsyncCreator<T>> InitOnce<T, Creator> {
    pub(crate) fn new(creator: Creator) -> Self {
        InitOnce {
            creating: Mutex::new(()),
            value: OnceCell::new(),
            creator,
        }
    }

    pub(crate) async fn get(&self) -> Result<&T, Creator::Error> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let _creating = self.creating.lock().await;
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let value = self.creator.create().await?;
        Ok(self.value.get_or_init(|| value))
    }

    /// Stores a value created elsewhere unless one is already there, and
    /// returns whichever value is kept.
    pub(crate) async fn provide(&self, value: T) -> &T {
        let _creating = self.creating.lock().await;
        self.value.get_or_init(|| value)
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{AsyncCreator, InitOnce};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counter {
        calls: Arc<AtomicUsize>,
        fail_first: bool,
    }

    #[async_trait]
    impl AsyncCreator<usize> for Counter {
        type Error = String;

        async fn create(&self) -> Result<usize, String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                Err("first call fails".into())
            } else {
                Ok(call)
            }
        }
    }

    #[tokio::test]
    async fn test_creates_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let once = Arc::new(InitOnce::new(Counter {
            calls: calls.clone(),
            fail_first: false,
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let once = once.clone();
                tokio::spawn(async move { *once.get().await.unwrap() })
            })
            .collect();
        for handle in handles {
            assert_eq!(0, handle.await.unwrap());
        }
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_retries_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let once = InitOnce::new(Counter {
            calls: calls.clone(),
            fail_first: true,
        });

        assert_eq!(Err("first call fails".to_string()), once.get().await.map(|v| *v));
        assert!(!once.is_initialized());
        assert_eq!(Ok(1), once.get().await.map(|v| *v));
        assert!(once.is_initialized());
    }

    #[tokio::test]
    async fn test_provide() {
        let calls = Arc::new(AtomicUsize::new(0));
        let once = InitOnce::new(Counter {
            calls: calls.clone(),
            fail_first: false,
        });

        assert_eq!(7, *once.provide(7).await);
        assert_eq!(7, *once.provide(9).await);
        assert_eq!(Ok(7), once.get().await.map(|v| *v));
        assert_eq!(0, calls.load(Ordering::SeqCst));
    }
}
