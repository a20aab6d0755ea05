use std::cell::Cell;

/// Runs the quit handler on the first `fire` only.
pub struct QuitOnce {
    quit: Box<dyn Fn()>,
    fired: Cell<bool>,
}

impl QuitOnce {
    pub fn new(quit: Box<dyn Fn()>) -> QuitOnce {
        QuitOnce {
            quit,
            fired: Cell::new(false),
        }
    }

    pub fn fire(&self) -> bool {
        if self.fired.get() {
            return false;
        }
        self.fired.set(true);
        (self.quit)();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn counting_quit() -> (QuitOnce, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let quit =
            QuitOnce::new(Box::new(move || count_clone.set(count_clone.get() + 1)));
        (quit, count)
    }

    #[test]
    fn test_fire_runs_the_handler() {
        let (quit, count) = counting_quit();
        assert!(quit.fire());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_fire_runs_at_most_once() {
        let (quit, count) = counting_quit();
        assert!(quit.fire());
        assert!(!quit.fire());
        assert!(!quit.fire());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_handler_does_not_run_before_fire() {
        let (_quit, count) = counting_quit();
        assert_eq!(count.get(), 0);
    }
}
