/// Resource tags, addressed by resource ARN.

use std::collections::BTreeMap;

use crate::domain::shape::shape;

shape! {
    pub struct GetTagsRequest {
        resource_arn / set_resource_arn / with_resource_arn: String,
    }
}

shape! {
    pub struct GetTagsResult {
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct TagResourceRequest {
        resource_arn / set_resource_arn / with_resource_arn: String,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct TagResourceResult {}
}

shape! {
    pub struct UntagResourceRequest {
        resource_arn / set_resource_arn / with_resource_arn: String,
        /// Sent as a repeated `tagKeys` query parameter.
        tag_keys / set_tag_keys / with_tag_keys: Vec<String>,
    }
}
