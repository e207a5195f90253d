//! Mobile navigation drawer.
//!
//! The drawer is a two-state toggle. While it is open it holds the page
//! scroll lock; the lock is a guard, so every way out of `Open` (toggle,
//! outside click, link, resize, or the drawer being dropped) releases it.

/// Viewport width (px) at which the desktop navigation takes over.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

/// Scroll distance (px) after which the header condenses.
pub const CONDENSE_AFTER: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    Toggle,
    OutsideClick,
    ViewportResized { width: f64 },
    LinkSelected,
}

impl DrawerState {
    pub fn next(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (DrawerState::Closed, DrawerEvent::Toggle) => DrawerState::Open,
            (DrawerState::Open, DrawerEvent::Toggle)
            | (DrawerState::Open, DrawerEvent::OutsideClick)
            | (DrawerState::Open, DrawerEvent::LinkSelected) => DrawerState::Closed,
            (DrawerState::Open, DrawerEvent::ViewportResized { width })
                if width >= DESKTOP_BREAKPOINT =>
            {
                DrawerState::Closed
            }
            (state, _) => state,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }
}

/// Whatever owns page scrolling.
pub trait ScrollLockHost {
    fn lock(&self);
    fn unlock(&self);
}

/// Held scroll lock; unlocks when dropped.
pub struct ScrollLock<H: ScrollLockHost> {
    host: H,
}

impl<H: ScrollLockHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        host.lock();
        Self { host }
    }
}

impl<H: ScrollLockHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.unlock();
    }
}

pub struct Drawer<H: ScrollLockHost + Clone> {
    state: DrawerState,
    host: H,
    lock: Option<ScrollLock<H>>,
}

impl<H: ScrollLockHost + Clone> Drawer<H> {
    pub fn new(host: H) -> Self {
        Self {
            state: DrawerState::Closed,
            host,
            lock: None,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn dispatch(&mut self, event: DrawerEvent) -> DrawerState {
        let next = self.state.next(event);
        if next != self.state {
            log::debug!("drawer {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        match next {
            DrawerState::Open if self.lock.is_none() => {
                self.lock = Some(ScrollLock::acquire(self.host.clone()));
            }
            DrawerState::Closed => self.lock = None,
            DrawerState::Open => {}
        }
        next
    }

    /// Close and give back the scroll lock regardless of the current state.
    pub fn release(&mut self) {
        self.state = DrawerState::Closed;
        self.lock = None;
    }
}

pub fn header_is_condensed(scroll_y: f64) -> bool {
    scroll_y > CONDENSE_AFTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone, Default)]
    struct FakePage {
        locked: Rc<Cell<bool>>,
        locks: Rc<Cell<usize>>,
    }

    impl ScrollLockHost for FakePage {
        fn lock(&self) {
            self.locked.set(true);
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
        }
    }

    #[test]
    fn test_toggle_cycle() {
        let state = DrawerState::default();
        assert_eq!(state, DrawerState::Closed);
        let state = state.next(DrawerEvent::Toggle);
        assert_eq!(state, DrawerState::Open);
        assert_eq!(state.next(DrawerEvent::Toggle), DrawerState::Closed);
    }

    #[test]
    fn test_closed_ignores_dismissals() {
        let closed = DrawerState::Closed;
        assert_eq!(closed.next(DrawerEvent::OutsideClick), DrawerState::Closed);
        assert_eq!(closed.next(DrawerEvent::LinkSelected), DrawerState::Closed);
        assert_eq!(
            closed.next(DrawerEvent::ViewportResized { width: 1280.0 }),
            DrawerState::Closed
        );
    }

    #[test]
    fn test_resize_closes_only_at_breakpoint() {
        let open = DrawerState::Open;
        assert_eq!(
            open.next(DrawerEvent::ViewportResized { width: 767.0 }),
            DrawerState::Open
        );
        assert_eq!(
            open.next(DrawerEvent::ViewportResized { width: 768.0 }),
            DrawerState::Closed
        );
    }

    #[test]
    fn test_outside_click_restores_scroll() {
        let page = FakePage::default();
        let mut drawer = Drawer::new(page.clone());
        drawer.dispatch(DrawerEvent::Toggle);
        assert!(page.locked.get());
        assert_eq!(drawer.dispatch(DrawerEvent::OutsideClick), DrawerState::Closed);
        assert!(!page.locked.get());
    }

    #[test]
    fn test_every_exit_path_unlocks() {
        let exits = [
            DrawerEvent::Toggle,
            DrawerEvent::OutsideClick,
            DrawerEvent::LinkSelected,
            DrawerEvent::ViewportResized { width: 1024.0 },
        ];
        for exit in exits {
            let page = FakePage::default();
            let mut drawer = Drawer::new(page.clone());
            drawer.dispatch(DrawerEvent::Toggle);
            drawer.dispatch(exit);
            assert!(!page.locked.get(), "{exit:?} left scroll locked");
            assert!(!drawer.state().is_open());
        }
    }

    #[test]
    fn test_narrow_resize_keeps_single_lock() {
        let page = FakePage::default();
        let mut drawer = Drawer::new(page.clone());
        drawer.dispatch(DrawerEvent::Toggle);
        drawer.dispatch(DrawerEvent::ViewportResized { width: 400.0 });
        assert!(page.locked.get());
        assert_eq!(page.locks.get(), 1);
    }

    #[test]
    fn test_drop_while_open_unlocks() {
        let page = FakePage::default();
        {
            let mut drawer = Drawer::new(page.clone());
            drawer.dispatch(DrawerEvent::Toggle);
            assert!(page.locked.get());
        }
        assert!(!page.locked.get());
    }

    #[test]
    fn test_release() {
        let page = FakePage::default();
        let mut drawer = Drawer::new(page.clone());
        drawer.dispatch(DrawerEvent::Toggle);
        drawer.release();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(!page.locked.get());
    }

    #[test]
    fn test_header_condenses() {
        assert!(!header_is_condensed(0.0));
        assert!(!header_is_condensed(100.0));
        assert!(header_is_condensed(100.5));
    }
}
