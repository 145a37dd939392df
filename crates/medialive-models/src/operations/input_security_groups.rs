//! Input security group operations.

use crate::common::Tags;
use crate::input::{InputSecurityGroup, InputSecurityGroupState, InputWhitelistRule, InputWhitelistRuleCidr};
use crate::shape::shape;

shape! {
    pub struct CreateInputSecurityGroupRequest {
        pub tags: Tags => with_tags,
        pub whitelist_rules: Vec<InputWhitelistRuleCidr> => with_whitelist_rules + push_whitelist_rule(InputWhitelistRuleCidr),
    }
}

shape! {
    pub struct CreateInputSecurityGroupResult {
        pub security_group: InputSecurityGroup => with_security_group,
    }
}

shape! {
    pub struct DescribeInputSecurityGroupRequest {
        pub input_security_group_id: String => with_input_security_group_id,
    }
}

shape! {
    pub struct DescribeInputSecurityGroupResult {
        pub arn: String => with_arn,
        pub id: String => with_id,
        pub inputs: Vec<String> => with_inputs + push_input(String),
        pub state: InputSecurityGroupState => with_state,
        pub tags: Tags => with_tags,
        pub whitelist_rules: Vec<InputWhitelistRule> => with_whitelist_rules + push_whitelist_rule(InputWhitelistRule),
    }
}

shape! {
    pub struct DeleteInputSecurityGroupRequest {
        pub input_security_group_id: String => with_input_security_group_id,
    }
}

shape! {
    pub struct DeleteInputSecurityGroupResult {}
}

shape! {
    pub struct ListInputSecurityGroupsRequest {
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct ListInputSecurityGroupsResult {
        pub input_security_groups: Vec<InputSecurityGroup> => with_input_security_groups + push_input_security_group(InputSecurityGroup),
        pub next_token: String => with_next_token,
    }
}

shape! {
    /// Replaces the rules and tags of a security group.
    pub struct UpdateInputSecurityGroupRequest {
        pub input_security_group_id: String => with_input_security_group_id,
        pub tags: Tags => with_tags,
        pub whitelist_rules: Vec<InputWhitelistRuleCidr> => with_whitelist_rules + push_whitelist_rule(InputWhitelistRuleCidr),
    }
}

shape! {
    pub struct UpdateInputSecurityGroupResult {
        pub security_group: InputSecurityGroup => with_security_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_whitelist_rules_json() {
        let request = CreateInputSecurityGroupRequest::new()
            .push_whitelist_rule(InputWhitelistRuleCidr::from_cidr("10.0.0.0/16"))
            .push_whitelist_rule(InputWhitelistRuleCidr::from_cidr("192.168.1.0/24"));
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"whitelistRules":[{"cidr":"10.0.0.0/16"},{"cidr":"192.168.1.0/24"}]}"#
        );
    }

    #[test]
    fn test_describe_result_state() {
        let result = DescribeInputSecurityGroupResult::from_json(
            r#"{"id":"123456","state":"IN_USE","inputs":["1234567"]}"#,
        )
        .unwrap();
        assert_eq!(result.state, Some(InputSecurityGroupState::InUse));
    }
}
