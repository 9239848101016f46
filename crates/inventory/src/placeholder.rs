//! Fallback artwork for listings without a photo.

/// Inline SVG (as a `data:` URI) shown when a listing has no usable image.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/svg+xml;utf8,",
    "%3Csvg%20xmlns%3D'http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg'%20width%3D'1600'%20height%3D'1000'%3E",
    "%3Crect%20width%3D'100%25'%20height%3D'100%25'%20fill%3D'%23e9e9ee'%2F%3E",
    "%3Ctext%20x%3D'50%25'%20y%3D'50%25'%20dominant-baseline%3D'middle'%20text-anchor%3D'middle'",
    "%20font-size%3D'36'%20fill%3D'%23d4af37'%20font-family%3D'sans-serif'%3ECar%20image",
    "%3C%2Ftext%3E%3C%2Fsvg%3E",
);
