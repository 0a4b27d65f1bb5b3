//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use weavelab::FabricError;
    use weavelab::io::error::{
        ErrorContext, WithContext, invalid_parameter, rule_error, unresolved,
    };

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = FabricError::FileSystem {
            path: "/tmp/oxford.json".into(),
            operation: "read configuration",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(unresolved("weave", &"plain").source().is_none());
    }

    // Tests unresolved reference messages name the kind and id
    // Verified by omitting the kind from the message
    #[test]
    fn test_unresolved_reference_error() {
        let message = unresolved("yarn", &"cotton_combed_99").to_string();
        assert_eq!(message, "Unknown yarn 'cotton_combed_99'");
    }

    // Tests InvalidConfiguration error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("pitch", &-4.0, &"must be a positive number").to_string();

        assert!(message.contains("pitch"));
        assert!(message.contains("-4"));
        assert!(message.contains("must be a positive number"));
    }

    // Tests composition and weave errors carry their ids
    // Verified by dropping the total from the message
    #[test]
    fn test_catalog_errors() {
        let composition = FabricError::InvalidComposition {
            yarn_id: "my_blend".to_string(),
            total: 90,
        };
        assert!(composition.to_string().contains("90%"));

        let weave = FabricError::InvalidWeave {
            weave_id: "broken".to_string(),
            reason: "matrix is 3x3, repeat is 4x4".to_string(),
        };
        assert_eq!(
            weave.to_string(),
            "Invalid weave 'broken': matrix is 3x3, repeat is 4x4"
        );

        let rule = rule_error("cost", &"no price");
        assert_eq!(rule.to_string(), "Rule family 'cost' failed: no price");
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = FabricError::ImageExport {
            path: PathBuf::from("/restricted/preview.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/preview.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests JSON errors convert and pick up a path
    // Verified by ignoring the path for serialization errors
    #[test]
    fn test_serialization_with_path() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let error = result.with_path("colorways/navy.json").unwrap_err();

        assert!(matches!(error, FabricError::Serialization { ref path, .. }
            if path == &PathBuf::from("colorways/navy.json")));
        assert!(error.to_string().contains("colorways/navy.json"));
    }

    // Tests context replaces both path and operation of I/O errors
    // Verified by keeping the placeholder operation
    #[test]
    fn test_with_context_io() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let error = result
            .with_context(ErrorContext {
                path: Some(PathBuf::from("out/report.json")),
                operation: Some("write report"),
            })
            .unwrap_err();

        assert!(matches!(
            error,
            FabricError::FileSystem { ref path, operation: "write report", .. }
                if path == &PathBuf::from("out/report.json")
        ));
    }

    // Tests context leaves non-file errors untouched
    // Verified by converting every error to a file system error
    #[test]
    fn test_with_path_ignores_other_errors() {
        let result: Result<(), FabricError> = Err(unresolved("weave", &"plaid"));
        let error = result.with_path("ignored.json").unwrap_err();

        assert!(matches!(
            error,
            FabricError::UnresolvedReference { kind: "weave", ref id } if id == "plaid"
        ));
    }
}
