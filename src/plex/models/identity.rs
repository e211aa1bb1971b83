use serde::Deserialize;

/// `GET /identity`, the only endpoint that answers without a token.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityMediaContainer {
    #[serde(rename = "machineIdentifier")]
    pub machine_identifier: Option<String>,
    pub version: Option<String>,
    pub claimed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_root_attributes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="0" claimed="1" machineIdentifier="abc123" version="1.40.2.8395-c67dce28e" />"#;
        let identity: IdentityMediaContainer = serde_xml_rs::from_str(xml).unwrap();
        assert_eq!(identity.machine_identifier.as_deref(), Some("abc123"));
        assert_eq!(identity.version.as_deref(), Some("1.40.2.8395-c67dce28e"));
        assert_eq!(identity.claimed.as_deref(), Some("1"));
    }
}
