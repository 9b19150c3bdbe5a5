use std::collections::BTreeMap;
use serde::Serialize;
use serde_json::{json, Map, Value};
use super::archive::{ArchiveImageLoader, ArchiveLoadOutput};
use crate::models::{FolderPaths, LoaderError, SortMethod};

/// Identifier the host registers the node under
pub const NODE_CLASS: &str = "ArchiveImageLoader";
/// Name shown in the host's node picker
pub const NODE_DISPLAY_NAME: &str = "Load Images from Archive";
/// Front-end extension that adds the upload button and drop target
pub const WEB_EXTENSION_NAME: &str = "Comfy.ArchiveImageLoader";

/// Node description in the shape the host's registry expects
#[derive(Debug, Clone, Serialize)]
pub struct NodeDefinition {
    pub name: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub function: &'static str,
    pub description: &'static str,
    pub input: Value,
    pub output: Vec<&'static str>,
    pub output_name: Vec<&'static str>,
}

impl NodeDefinition {
    pub fn archive_image_loader() -> Self {
        Self {
            name: NODE_CLASS,
            display_name: NODE_DISPLAY_NAME,
            category: "only/Image",
            function: "load_from_archive",
            description: "Extracts an uploaded ZIP or 7z archive into the input folder \
                          and loads the images it contains as a batch.",
            input: json!({
                "required": {
                    // Hidden widget filled by the front-end after the upload
                    "archive_file": ["STRING", { "default": "", "multiline": false }],
                },
                "optional": {
                    "sort_method": [SortMethod::CHOICES],
                },
            }),
            output: vec!["IMAGE", "STRING"],
            output_name: vec!["images", "directory_path"],
        }
    }
}

/// Identifier → node definition
pub fn node_class_mappings() -> BTreeMap<&'static str, NodeDefinition> {
    BTreeMap::from([(NODE_CLASS, NodeDefinition::archive_image_loader())])
}

/// Identifier → display name
pub fn node_display_name_mappings() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([(NODE_CLASS, NODE_DISPLAY_NAME)])
}

/// Dispatches host invocations to the node by class type
pub struct NodeRegistry {
    loader: ArchiveImageLoader,
}

impl NodeRegistry {
    pub fn new(folders: FolderPaths) -> Self {
        Self {
            loader: ArchiveImageLoader::new(folders),
        }
    }

    /// Registry description of every node, keyed by identifier
    pub fn object_info(&self) -> Value {
        json!(node_class_mappings())
    }

    /// Run `class_type` with the host's JSON input map
    ///
    /// # Errors
    /// * `InvalidInput` - unknown class type, missing `archive_file`, or a value of the
    ///   wrong type / outside the advertised choices
    /// * anything the node itself raises
    pub fn invoke(&self, class_type: &str, inputs: &Value) -> Result<ArchiveLoadOutput, LoaderError> {
        if class_type != NODE_CLASS {
            return Err(LoaderError::InvalidInput(format!("Unknown node class: {}", class_type)));
        }

        let inputs = inputs
            .as_object()
            .ok_or_else(|| LoaderError::InvalidInput("Node inputs must be a JSON object".to_string()))?;

        let archive_file = required_str(inputs, "archive_file")?;
        let sort_method = match inputs.get("sort_method") {
            None | Some(Value::Null) => SortMethod::default(),
            Some(Value::String(s)) => s.parse()?,
            Some(other) => {
                return Err(LoaderError::InvalidInput(format!(
                    "sort_method must be a string, got {}",
                    other
                )))
            }
        };

        log::debug!("Invoking {} (archive_file='{}', sort_method={})", class_type, archive_file, sort_method);

        self.loader.load_from_archive(archive_file, sort_method)
    }
}

fn required_str<'a>(inputs: &'a Map<String, Value>, key: &str) -> Result<&'a str, LoaderError> {
    match inputs.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(LoaderError::InvalidInput(format!("{} must be a string, got {}", key, other))),
        None => Err(LoaderError::InvalidInput(format!("Missing required input: {}", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> (TempDir, NodeRegistry) {
        let root = TempDir::new().unwrap();
        let registry = NodeRegistry::new(FolderPaths::from_base_dir(root.path()));
        (root, registry)
    }

    #[test]
    fn test_mappings() {
        let classes = node_class_mappings();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[NODE_CLASS].display_name, "Load Images from Archive");
        assert_eq!(node_display_name_mappings()["ArchiveImageLoader"], "Load Images from Archive");
    }

    #[test]
    fn test_definition_json() {
        let (_root, registry) = registry();
        let info = registry.object_info();
        let node = &info["ArchiveImageLoader"];

        assert_eq!(node["category"], "only/Image");
        assert_eq!(node["function"], "load_from_archive");
        assert_eq!(node["output"], json!(["IMAGE", "STRING"]));
        assert_eq!(node["output_name"], json!(["images", "directory_path"]));
        assert_eq!(
            node["input"]["required"]["archive_file"],
            json!(["STRING", { "default": "", "multiline": false }])
        );
        assert_eq!(
            node["input"]["optional"]["sort_method"],
            json!([["None", "alphabetical", "reverse_alphabetical"]])
        );
    }

    #[test]
    fn test_invoke_blank_archive() {
        let (_root, registry) = registry();
        let output = registry
            .invoke(NODE_CLASS, &json!({ "archive_file": "" }))
            .unwrap();
        let (images, path) = output.into_outputs();
        assert!(images.is_empty());
        assert_eq!(path, "");
    }

    #[test]
    fn test_invoke_missing_archive() {
        let (_root, registry) = registry();
        let result = registry.invoke(
            NODE_CLASS,
            &json!({ "archive_file": "nope.zip", "sort_method": "alphabetical" }),
        );
        assert!(matches!(result, Err(LoaderError::NotFound(_))));
    }

    #[test]
    fn test_invoke_rejects_bad_inputs() {
        let (_root, registry) = registry();

        let cases = [
            ("OtherNode", json!({ "archive_file": "" })),
            (NODE_CLASS, json!(["archive_file"])),
            (NODE_CLASS, json!({})),
            (NODE_CLASS, json!({ "archive_file": 3 })),
            (NODE_CLASS, json!({ "archive_file": "", "sort_method": "shuffled" })),
            (NODE_CLASS, json!({ "archive_file": "", "sort_method": 1 })),
        ];

        for (class_type, inputs) in cases {
            let result = registry.invoke(class_type, &inputs);
            assert!(
                matches!(result, Err(LoaderError::InvalidInput(_))),
                "expected InvalidInput for {} {}",
                class_type,
                inputs
            );
        }
    }
}
