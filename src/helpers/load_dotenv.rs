use std::path::PathBuf;

/// Load a `.env` file from the working directory (or its parents), if any.
///
/// Returns the path that was loaded. Nothing is printed here, since the
/// logger is not yet initialised and stdout must stay clean on success.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
