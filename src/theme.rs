//! Colour scheme and layout constants for the lookup screen.
//! No dependencies on lookup state.

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window and status bar background.
    pub background: Rgb,
    /// Body text and button labels.
    pub font: Rgb,
    /// Title, login and button fill.
    pub dark_font: Rgb,
}

/// GitHub dark theme.
pub const PALETTE: Palette = Palette {
    background: Rgb(0x01, 0x04, 0x09), // #010409
    font: Rgb(0xC9, 0xD1, 0xC9),       // #C9D1C9
    dark_font: Rgb(0x4F, 0x56, 0x5E),  // #4F565E
};

/// Edge length of the rendered avatar, in logical pixels.
pub const AVATAR_SIZE: u32 = 150;
