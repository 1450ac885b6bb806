//! Gallery lightbox navigation.

/// Which gallery item, if any, is shown full-screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// Keys the lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Next,
    Prev,
}

impl LightboxKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Lightbox over a gallery of `len` items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(i) => Some(i),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.index().is_some()
    }

    /// Opens item `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.state = LightboxState::Open(index);
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.index() {
            self.state = LightboxState::Open((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.index() {
            self.state = LightboxState::Open((i + self.len - 1) % self.len);
        }
    }

    /// Handles a key press. Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close(),
            Some(LightboxKey::Next) => self.next(),
            Some(LightboxKey::Prev) => self.prev(),
            None => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.index(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.index(), Some(2));
    }

    #[test]
    fn keys_only_handled_while_open() {
        let mut lightbox = Lightbox::new(4);
        assert!(!lightbox.on_key("ArrowRight"));
        assert_eq!(lightbox.state(), LightboxState::Closed);

        lightbox.open(1);
        assert!(lightbox.on_key("ArrowRight"));
        assert_eq!(lightbox.index(), Some(2));
        assert!(lightbox.on_key("ArrowLeft"));
        assert_eq!(lightbox.index(), Some(1));
        assert!(!lightbox.on_key("Enter"));
        assert!(lightbox.on_key("Escape"));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        lightbox.open(0);
        lightbox.next();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lightbox = Lightbox::new(2);
        lightbox.open(5);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }
}
