use serde::Deserialize;

/// Represents a GitHub release asset
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Represents a GitHub release
#[derive(Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_ignores_unknown_fields() {
        let json = r#"{
            "tag_name": "v0.40.0",
            "name": "Gate v0.40.0",
            "prerelease": false,
            "assets": [
                {
                    "name": "gate_0.40.0_linux_amd64",
                    "size": 1234,
                    "browser_download_url": "https://example.com/gate_0.40.0_linux_amd64"
                }
            ]
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();

        assert_eq!(release.tag_name, "v0.40.0");
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "gate_0.40.0_linux_amd64");
    }

    #[test]
    fn test_release_missing_assets_defaults_to_empty() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v1.0.0"}"#).unwrap();
        assert!(release.assets.is_empty());
    }
}
