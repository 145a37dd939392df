//! Tag operations.

use crate::common::Tags;
use crate::shape::shape;

shape! {
    pub struct CreateTagsRequest {
        pub resource_arn: String => with_resource_arn,
        pub tags: Tags => with_tags,
    }
}

shape! {
    pub struct CreateTagsResult {}
}

shape! {
    pub struct DeleteTagsRequest {
        pub resource_arn: String => with_resource_arn,
        /// Sent as a repeated `tagKeys` query parameter.
        pub tag_keys: Vec<String> => with_tag_keys + push_tag_key(String),
    }
}

shape! {
    pub struct DeleteTagsResult {}
}

shape! {
    pub struct ListTagsForResourceRequest {
        pub resource_arn: String => with_resource_arn,
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        pub tags: Tags => with_tags,
    }
}

impl CreateTagsRequest {
    /// Adds one tag, allocating the map when absent.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Tags::new).insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_create_tags_builder() {
        let request = CreateTagsRequest::new()
            .with_resource_arn("arn:aws:medialive:us-west-2:123456789012:channel:8675309")
            .tag("env", "prod")
            .tag("team", "live");
        let json = request.to_json().unwrap();
        assert!(json.ends_with(r#""tags":{"env":"prod","team":"live"}}"#));
    }

    #[test]
    fn test_list_tags_result() {
        let result = ListTagsForResourceResult::from_json(r#"{"tags":{"b":"2","a":"1"}}"#).unwrap();
        assert_eq!(result.to_string(), "{Tags: {a=1, b=2}}");
    }
}
