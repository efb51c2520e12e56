use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use once_cell::sync::OnceCell;
use plotters::style::{register_font, FontStyle};
use walkdir::WalkDir;
use crate::reference::error::ReferenceError;
/// Family name every text style in the figure asks for.
pub const FAMILY: &str = "sans-serif";
/// (regular, bold) file names, first complete pair wins.
const FACES: [(&str, &str); 5] = [
    ("DejaVuSans.ttf", "DejaVuSans-Bold.ttf"),
    ("LiberationSans-Regular.ttf", "LiberationSans-Bold.ttf"),
    ("FreeSans.ttf", "FreeSansBold.ttf"),
    ("Arial.ttf", "Arial Bold.ttf"),
    ("arial.ttf", "arialbd.ttf"),
];
const FONT_DIRS: [&str; 5] = [
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];
static REGISTERED: OnceCell<()> = OnceCell::new();
/// Registers a regular and a bold system face under [`FAMILY`], once per process.
pub fn ensure_registered() -> Result<(), ReferenceError> {
    REGISTERED.get_or_try_init(register_system_faces).map(|_| ())
}
fn register_system_faces() -> Result<(), ReferenceError> {
    let files = font_files();
    debug!("found {} font files", files.len());
    for (regular, bold) in FACES {
        let (Some(regular_path), Some(bold_path)) = (find(&files, regular), find(&files, bold))
        else {
            continue;
        };
        register(FontStyle::Normal, regular_path)?;
        register(FontStyle::Bold, bold_path)?;
        info!(
            "using fonts {} / {}",
            regular_path.display(),
            bold_path.display()
        );
        return Ok(());
    }
    Err(ReferenceError::Font(format!(
        "no regular + bold sans-serif pair found under {}",
        FONT_DIRS.join(", ")
    )))
}
fn font_files() -> Vec<PathBuf> {
    FONT_DIRS
        .iter()
        .flat_map(|dir| WalkDir::new(dir).follow_links(true).into_iter())
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
fn find<'a>(files: &'a [PathBuf], name: &str) -> Option<&'a Path> {
    files
        .iter()
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .map(PathBuf::as_path)
}
fn register(style: FontStyle, path: &Path) -> Result<(), ReferenceError> {
    let bytes = fs::read(path)
        .map_err(|err| ReferenceError::Font(format!("{}: {err}", path.display())))?;
    // plotters keeps the face for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FAMILY, style, bytes)
        .map_err(|_| ReferenceError::Font(format!("{}: invalid font", path.display())))
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn lookup_matches_file_name_case_insensitively() {
        let files = vec![
            PathBuf::from("/fonts/a/DEJAVUSANS.TTF"),
            PathBuf::from("/fonts/b/DejaVuSans-Bold.ttf"),
        ];
        assert_eq!(find(&files, "DejaVuSans.ttf"), Some(Path::new("/fonts/a/DEJAVUSANS.TTF")));
        assert_eq!(
            find(&files, "DejaVuSans-Bold.ttf"),
            Some(Path::new("/fonts/b/DejaVuSans-Bold.ttf"))
        );
        assert_eq!(find(&files, "arial.ttf"), None);
    }
    #[test]
    fn registration_is_idempotent() {
        ensure_registered().unwrap();
        ensure_registered().unwrap();
    }
}
