//! Theme signal supplied by the page shell.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub const LIGHT: Theme = Theme { dark: false };
    pub const DARK: Theme = Theme { dark: true };

    /// Class put on `<html>` so the stylesheet can switch palettes.
    pub fn html_class(self) -> Option<&'static str> {
        self.dark.then_some("dark")
    }
}
