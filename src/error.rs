// Crate error type. Every variant states *where* things went wrong.
// Bad user input (resolution, brush strength) is never an Error: it is
// rejected and the field is reverted.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("cannot parse colour '{0}'")]
    ColorParse(String), // Text at the css boundary was not rgb()/rgba()
}
