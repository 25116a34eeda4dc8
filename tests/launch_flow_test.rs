// ==========================================
// 发射排期与生命周期端到端测试
// ==========================================
// 测试目标: 经 API 边界走通 排期 → 列表 → 中止 全流程
// ==========================================


use launch_tracker::api::{ApiError, SchedulePayload};
use launch_tracker::app::AppState;
use launch_tracker::domain::launch::AbortOutcome;
use launch_tracker::domain::planet::Planet;

fn schedule_payload() -> SchedulePayload {
    SchedulePayload {
        mission: Some("USS Enterprise".to_string()),
        rocket: Some("NCC 1701-D".to_string()),
        launch_date: Some("2028-01-04".to_string()),
        target: Some("Kepler-62 f".to_string()),
        customers: None,
    }
}

/// 建立带一条历史记录和一颗参考行星的应用状态
fn setup_state() -> (tempfile::NamedTempFile, AppState) {
    let (temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let state = AppState::new(&db_path).unwrap();

    state
        .planet_repo
        .upsert_planet(&Planet {
            kepler_name: "Kepler-62 f".to_string(),
        })
        .unwrap();
    state
        .launch_repo
        .put_launch(&test_helpers::make_historic_launch(1))
        .unwrap();

    (temp_file, state)
}

// ==========================================
// 排期
// ==========================================

#[test]
fn test_schedule_full_flow() {
    let (_temp_file, state) = setup_state();

    let launch = state.launch_api.schedule_launch(schedule_payload()).unwrap();

    assert_eq!(launch.flight_number, 2);
    assert_eq!(launch.mission, "USS Enterprise");
    assert_eq!(launch.rocket, "NCC 1701-D");
    assert!(launch.upcoming);
    assert!(launch.success);
    assert_eq!(launch.customers, vec!["NASA", "ZTM"]);
    assert_eq!(launch.launch_date.to_rfc3339(), "2028-01-04T00:00:00+00:00");

    // 连续排期编号单调递增
    let next = state.launch_api.schedule_launch(schedule_payload()).unwrap();
    assert_eq!(next.flight_number, 3);
}

#[test]
fn test_schedule_rejects_missing_fields() {
    let (_temp_file, state) = setup_state();

    let mut payload = schedule_payload();
    payload.launch_date = None;

    let err = state.launch_api.schedule_launch(payload).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert_eq!(state.launch_repo.count().unwrap(), 1);
}

#[test]
fn test_schedule_rejects_invalid_date() {
    let (_temp_file, state) = setup_state();

    let mut payload = schedule_payload();
    payload.launch_date = Some("zoot".to_string());

    let err = state.launch_api.schedule_launch(payload).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_schedule_rejects_unknown_target() {
    let (_temp_file, state) = setup_state();

    let mut payload = schedule_payload();
    payload.target = Some("Vulcan".to_string());

    let err = state.launch_api.schedule_launch(payload).unwrap_err();
    assert!(matches!(err, ApiError::UnknownTarget(name) if name == "Vulcan"));

    // 校验失败无写入
    assert_eq!(state.launch_repo.count().unwrap(), 1);
}

// ==========================================
// 列表
// ==========================================

#[test]
fn test_list_pagination_convention() {
    let (_temp_file, state) = setup_state();
    for _ in 0..3 {
        state.launch_api.schedule_launch(schedule_payload()).unwrap();
    }

    // 全量（limit 缺省 = 不限制），升序
    let all = state.launch_api.list_launches(None, None).unwrap();
    let numbers: Vec<i64> = all.iter().map(|l| l.flight_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);

    // page/limit → skip/limit 换算
    let page2 = state.launch_api.list_launches(Some(2), Some(2)).unwrap();
    let numbers: Vec<i64> = page2.iter().map(|l| l.flight_number).collect();
    assert_eq!(numbers, vec![3, 4]);

    // 永不超过 limit 条
    let page1 = state.launch_api.list_launches(Some(1), Some(3)).unwrap();
    assert_eq!(page1.len(), 3);
}

// ==========================================
// 中止
// ==========================================

#[test]
fn test_abort_flow_distinguishes_outcomes() {
    let (_temp_file, state) = setup_state();
    let launch = state.launch_api.schedule_launch(schedule_payload()).unwrap();

    // 首次中止: 命中并改写
    let outcome = state.launch_api.abort_launch(launch.flight_number).unwrap();
    assert_eq!(outcome, AbortOutcome { matched: 1, modified: 1 });

    let aborted = state
        .launch_repo
        .find_by_flight_number(launch.flight_number)
        .unwrap()
        .unwrap();
    assert!(!aborted.upcoming);
    assert!(!aborted.success);
    // 身份字段不受中止影响
    assert_eq!(aborted.mission, "USS Enterprise");

    // 重放: 命中但零改写
    let replay = state.launch_api.abort_launch(launch.flight_number).unwrap();
    assert_eq!(replay, AbortOutcome { matched: 1, modified: 0 });

    // 未知编号: 边界层上报 NotFound
    let err = state.launch_api.abort_launch(9999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
