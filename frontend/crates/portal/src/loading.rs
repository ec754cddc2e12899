//! Scoped `isLoading` flag

use tokio::sync::watch;

/// Form state that carries a loading flag
pub trait Loading {
    fn set_loading(&mut self, loading: bool);
}

/// Sets the flag on acquire and clears it on drop, whichever way the
/// submit exits
#[must_use]
pub struct LoadingGuard<'a, S: Loading> {
    state: &'a watch::Sender<S>,
}

impl<'a, S: Loading> LoadingGuard<'a, S> {
    pub fn acquire(state: &'a watch::Sender<S>) -> Self {
        state.send_modify(|s| s.set_loading(true));
        Self { state }
    }
}

impl<S: Loading> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.set_loading(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag(bool);

    impl Loading for Flag {
        fn set_loading(&mut self, loading: bool) {
            self.0 = loading;
        }
    }

    #[test]
    fn test_released_on_drop() {
        let (tx, rx) = watch::channel(Flag::default());
        {
            let _guard = LoadingGuard::acquire(&tx);
            assert!(rx.borrow().0);
        }
        assert!(!rx.borrow().0);
    }

    #[test]
    fn test_released_on_panic() {
        let (tx, rx) = watch::channel(Flag::default());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = LoadingGuard::acquire(&tx);
            panic!("submit blew up");
        }));
        assert!(result.is_err());
        assert!(!rx.borrow().0);
    }
}
