//! Custom assertion helpers for accessor tests.

use sk_core::PipelineConfigAccessor;

/// Assert that every 1-based lookup agrees with the stage list.
pub fn assert_index_lookups_match_stages(accessor: &PipelineConfigAccessor) {
    for (position, stage) in accessor.get_stages().iter().enumerate() {
        let index = position as i64 + 1;
        assert_eq!(
            accessor.get_stage_by_index(index),
            Some(stage),
            "stage {} should be at index {}",
            stage.id,
            index
        );
        assert_eq!(accessor.get_prompt_by_index(index), stage.prompt);
        assert_eq!(accessor.get_model_for_stage(index), stage.model);
    }
}

/// Assert that the positions just outside the stage list are empty.
pub fn assert_out_of_range_is_absent(accessor: &PipelineConfigAccessor) {
    let past_end = accessor.get_stage_count() as i64 + 1;

    for index in [0, past_end] {
        assert!(
            accessor.get_stage_by_index(index).is_none(),
            "index {} should be absent",
            index
        );
        assert_eq!(accessor.get_prompt_by_index(index), "");
        assert_eq!(accessor.get_model_for_stage(index), "");
    }
}
