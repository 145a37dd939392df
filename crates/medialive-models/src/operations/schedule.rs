//! Schedule operations.

use crate::schedule::ScheduleAction;
use crate::shape::shape;

shape! {
    pub struct BatchScheduleActionCreateRequest {
        pub schedule_actions: Vec<ScheduleAction> => with_schedule_actions + push_schedule_action(ScheduleAction),
    }
}

shape! {
    pub struct BatchScheduleActionDeleteRequest {
        /// Names of scheduled actions to remove.
        pub action_names: Vec<String> => with_action_names + push_action_name(String),
    }
}

shape! {
    pub struct BatchScheduleActionCreateResult {
        pub schedule_actions: Vec<ScheduleAction> => with_schedule_actions + push_schedule_action(ScheduleAction),
    }
}

shape! {
    pub struct BatchScheduleActionDeleteResult {
        pub schedule_actions: Vec<ScheduleAction> => with_schedule_actions + push_schedule_action(ScheduleAction),
    }
}

shape! {
    /// Adds and removes schedule actions in one call. Deletes apply first.
    pub struct BatchUpdateScheduleRequest {
        pub channel_id: String => with_channel_id,
        pub creates: BatchScheduleActionCreateRequest => with_creates,
        pub deletes: BatchScheduleActionDeleteRequest => with_deletes,
    }
}

shape! {
    pub struct BatchUpdateScheduleResult {
        pub creates: BatchScheduleActionCreateResult => with_creates,
        pub deletes: BatchScheduleActionDeleteResult => with_deletes,
    }
}

shape! {
    pub struct DescribeScheduleRequest {
        pub channel_id: String => with_channel_id,
        pub max_results: i32 where min = 1, max = 1000 => with_max_results,
        pub next_token: String => with_next_token,
    }
}

shape! {
    pub struct DescribeScheduleResult {
        pub next_token: String => with_next_token,
        pub schedule_actions: Vec<ScheduleAction> => with_schedule_actions + push_schedule_action(ScheduleAction),
    }
}

shape! {
    /// Removes every action from a channel's schedule.
    pub struct DeleteScheduleRequest {
        pub channel_id: String => with_channel_id,
    }
}

shape! {
    pub struct DeleteScheduleResult {}
}

impl BatchUpdateScheduleRequest {
    /// Queues `action` for creation.
    pub fn create(mut self, action: impl Into<ScheduleAction>) -> Self {
        let creates = self.creates.take().unwrap_or_default();
        self.with_creates(creates.push_schedule_action(action))
    }

    /// Queues the action named `action_name` for deletion.
    pub fn delete(mut self, action_name: impl Into<String>) -> Self {
        let deletes = self.deletes.take().unwrap_or_default();
        self.with_deletes(deletes.push_action_name(action_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{
        InputSwitchScheduleActionSettings, ScheduleActionStartSettings,
        StaticImageDeactivateScheduleActionSettings,
    };
    use crate::shape::Shape;

    #[test]
    fn test_batch_update_builder() {
        let request = BatchUpdateScheduleRequest::new()
            .with_channel_id("8675309")
            .delete("old-switch")
            .create(
                ScheduleAction::new()
                    .with_action_name("switch")
                    .with_schedule_action_settings(
                        InputSwitchScheduleActionSettings::new()
                            .with_input_attachment_name_reference("backup"),
                    )
                    .with_schedule_action_start_settings(ScheduleActionStartSettings::immediate()),
            )
            .create(
                ScheduleAction::new()
                    .with_action_name("clear-logo")
                    .with_schedule_action_settings(
                        StaticImageDeactivateScheduleActionSettings::new().with_layer(0),
                    ),
            );

        let creates = request.creates.as_ref().unwrap().schedule_actions.as_ref().unwrap();
        assert_eq!(creates.len(), 2);
        assert_eq!(
            request.deletes.as_ref().unwrap().action_names,
            Some(vec!["old-switch".to_string()])
        );
    }

    #[test]
    fn test_describe_schedule_result_parses_actions() {
        let json = r#"{
            "scheduleActions": [{
                "actionName": "ad-break",
                "scheduleActionSettings": {
                    "scte35SpliceInsertSettings": {"spliceEventId": 1, "duration": 2700000}
                },
                "scheduleActionStartSettings": {
                    "fixedModeScheduleActionStartSettings": {"time": "2026-10-16T18:30:00.000Z"}
                }
            }]
        }"#;
        let result = DescribeScheduleResult::from_json(json).unwrap();
        let actions = result.schedule_actions.unwrap();
        let action = &actions[0];
        assert_eq!(
            action.schedule_action_settings.as_ref().map(|s| s.member_name()),
            Some("scte35SpliceInsertSettings")
        );
        assert!(action.fixed_start_time().is_some());
    }

    #[test]
    fn test_unknown_action_member_is_kept() {
        let json = r#"{"scheduleActions":[{"actionName":"gfx","scheduleActionSettings":{"motionGraphicsImageActivateSettings":{"url":"https://example.com/overlay.html"}}}]}"#;
        let result = DescribeScheduleResult::from_json(json).unwrap();
        let actions = result.schedule_actions.as_ref().unwrap();
        let settings = actions[0].schedule_action_settings.as_ref().unwrap();
        assert!(settings.is_unknown());
        assert_eq!(settings.member_name(), "motionGraphicsImageActivateSettings");
        assert_eq!(result.to_json().unwrap(), json);
    }
}
