mod drawable_glacier;

pub use drawable_glacier::DrawableGlacier;
