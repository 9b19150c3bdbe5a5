use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use crate::models::LoaderError;

/// Host folders the node reads from and writes to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPaths {
    /// Where the front-end uploads archives (`type=temp`)
    pub temp_directory: PathBuf,
    /// Root under which each archive gets its own extraction directory
    pub input_directory: PathBuf,
}

impl FolderPaths {
    pub fn new(temp_directory: impl Into<PathBuf>, input_directory: impl Into<PathBuf>) -> Self {
        Self {
            temp_directory: temp_directory.into(),
            input_directory: input_directory.into(),
        }
    }

    /// Default host layout: `<base>/temp` and `<base>/input`
    pub fn from_base_dir(base_dir: &Path) -> Self {
        Self::new(base_dir.join("temp"), base_dir.join("input"))
    }

    /// Parse folder configuration handed over by the host as JSON
    pub fn from_json(json: &str) -> Result<Self, LoaderError> {
        serde_json::from_str(json)
            .map_err(|e| LoaderError::InvalidInput(format!("Invalid folder configuration: {}", e)))
    }
}

/// Ordering applied to image files after the default ascending sort
///
/// `None` keeps the ascending order, so it behaves exactly like `Alphabetical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMethod {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "alphabetical")]
    Alphabetical,
    #[serde(rename = "reverse_alphabetical")]
    ReverseAlphabetical,
}

impl SortMethod {
    /// Values advertised to the host, in widget order
    pub const CHOICES: [&'static str; 3] = ["None", "alphabetical", "reverse_alphabetical"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::None => "None",
            SortMethod::Alphabetical => "alphabetical",
            SortMethod::ReverseAlphabetical => "reverse_alphabetical",
        }
    }

    /// Re-sort names that are already in ascending order
    pub fn apply<T: AsRef<str>>(&self, items: &mut [T]) {
        match self {
            SortMethod::None => {}
            SortMethod::Alphabetical => items.sort_by(|a, b| a.as_ref().cmp(b.as_ref())),
            SortMethod::ReverseAlphabetical => items.sort_by(|a, b| b.as_ref().cmp(a.as_ref())),
        }
    }
}

impl FromStr for SortMethod {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(SortMethod::None),
            "alphabetical" => Ok(SortMethod::Alphabetical),
            "reverse_alphabetical" => Ok(SortMethod::ReverseAlphabetical),
            other => Err(LoaderError::InvalidInput(format!(
                "sort_method must be one of {:?}, got '{}'",
                Self::CHOICES,
                other
            ))),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_paths_from_base() {
        let paths = FolderPaths::from_base_dir(Path::new("/opt/host"));
        assert_eq!(paths.temp_directory, Path::new("/opt/host/temp"));
        assert_eq!(paths.input_directory, Path::new("/opt/host/input"));
    }

    #[test]
    fn test_folder_paths_from_json() {
        let paths = FolderPaths::from_json(
            r#"{"tempDirectory": "/data/temp", "inputDirectory": "/data/input"}"#,
        )
        .unwrap();
        assert_eq!(paths, FolderPaths::new("/data/temp", "/data/input"));

        assert!(FolderPaths::from_json(r#"{"tempDirectory": "/data/temp"}"#).is_err());
    }

    #[test]
    fn test_sort_method_parse() {
        assert_eq!("None".parse::<SortMethod>().unwrap(), SortMethod::None);
        assert_eq!("alphabetical".parse::<SortMethod>().unwrap(), SortMethod::Alphabetical);
        assert_eq!(
            "reverse_alphabetical".parse::<SortMethod>().unwrap(),
            SortMethod::ReverseAlphabetical
        );
        assert!("random".parse::<SortMethod>().is_err());
        assert!("none".parse::<SortMethod>().is_err());
    }

    #[test]
    fn test_sort_method_serde_names() {
        for choice in SortMethod::CHOICES {
            let parsed: SortMethod = serde_json::from_value(serde_json::json!(choice)).unwrap();
            assert_eq!(parsed.as_str(), choice);
        }
        assert_eq!(SortMethod::default(), SortMethod::None);
    }

    #[test]
    fn test_apply() {
        let ascending = vec!["a.png", "b.png", "c.png"];

        let mut none = ascending.clone();
        SortMethod::None.apply(&mut none);
        assert_eq!(none, ascending);

        let mut alpha = ascending.clone();
        SortMethod::Alphabetical.apply(&mut alpha);
        assert_eq!(alpha, ascending);

        let mut reverse = ascending.clone();
        SortMethod::ReverseAlphabetical.apply(&mut reverse);
        assert_eq!(reverse, vec!["c.png", "b.png", "a.png"]);
    }
}
