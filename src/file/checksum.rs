use super::Hashes;
use crate::entry::Item;
use crate::response::{envelope, ErrorEnvelope};

/// Returned by `checksumfile`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksumFileResult {
    #[serde(flatten)]
    pub status: ErrorEnvelope,
    #[serde(flatten)]
    pub hashes: Hashes,
    pub metadata: Item,
}

envelope!(ChecksumFileResult);

#[cfg(test)]
mod tests {
    use super::ChecksumFileResult;
    use crate::response::read;

    #[test]
    fn should_decode_eu_response() {
        let body = r#"{
    "result": 0,
    "sha256": "d535d3354f9d36741e311ac0855c5cde1e8e90eae947f320469f17514d182e19",
    "sha1": "5b03ef4fa47ed13f2156ec5395866dadbde4e9dc",
    "metadata": {
        "name": "C61EWBrr2sU16GM4.bin",
        "created": "Sat, 24 Jul 2021 07:38:41 +0000",
        "thumb": false,
        "modified": "Sat, 24 Jul 2021 07:38:41 +0000",
        "isfolder": false,
        "fileid": 5257731387,
        "hash": 9403476549337371523,
        "comments": 0,
        "category": 0,
        "id": "f5257731387",
        "isshared": false,
        "ismine": true,
        "size": 10485760,
        "parentfolderid": 1075398908,
        "contenttype": "application\/octet-stream",
        "icon": "file"
    }
}"#;
        let result: ChecksumFileResult = read(Ok(body)).unwrap();
        assert_eq!(result.hashes.sha1, "5b03ef4fa47ed13f2156ec5395866dadbde4e9dc");
        assert!(result.hashes.md5.is_empty());
        assert_eq!(
            result.hashes.sha256.as_deref(),
            Some("d535d3354f9d36741e311ac0855c5cde1e8e90eae947f320469f17514d182e19")
        );
        assert_eq!(result.metadata.file_id(), Some(5257731387));
    }

    #[test]
    fn should_decode_us_response() {
        let body = r#"{
    "result": 0,
    "md5": "2c6ee24b09816a6f14f95d1698b24ead",
    "sha1": "5b03ef4fa47ed13f2156ec5395866dadbde4e9dc",
    "metadata": {
        "name": "hello.txt",
        "created": "Sat, 24 Jul 2021 07:38:41 +0000",
        "modified": "Sat, 24 Jul 2021 07:38:41 +0000",
        "isfolder": false,
        "fileid": 42,
        "id": "f42",
        "size": 12,
        "parentfolderid": 0,
        "icon": "document"
    }
}"#;
        let result: ChecksumFileResult = read(Ok(body)).unwrap();
        assert_eq!(result.hashes.md5, "2c6ee24b09816a6f14f95d1698b24ead");
        assert_eq!(result.hashes.sha256, None);
        assert_eq!(result.metadata.name, "hello.txt");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["md5"], "2c6ee24b09816a6f14f95d1698b24ead");
        assert_eq!(value["result"], 0);
        assert!(value.get("sha256").is_none());
        assert!(value.get("hashes").is_none());
    }

    #[test]
    fn should_fail_on_missing_file() {
        let body = r#"{ "result": 2009, "error": "File not found." }"#;
        let err = read::<ChecksumFileResult, _>(Ok(body)).unwrap_err();
        assert_eq!(err.to_string(), "File not found. (2009)");
    }
}
