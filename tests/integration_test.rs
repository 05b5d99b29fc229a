/// Integration tests for the application layer
mod test_utilities;

use chrono::{DateTime, Utc};
use maplem_lookup::prelude::*;
use std::time::Duration;
use test_utilities::mocks::*;

fn query() -> SearchQuery {
    SearchQuery::new("슬라임", World::Luna).unwrap()
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_lookup_happy_path() {
    let repository = MockCharacterRepository::new()
        .with_guild("메이플")
        .with_item("혈맹의 반지", "장비 장신구", "반지1")
        .with_item("아케인셰이드 아대", "장비 무기", "무기")
        .with_stat("전투력", "1234567")
        .with_core("스프레드 스로우", "Skill", 25, 2)
        .with_core("어썰트 강화", "Enhancement", 20, 0)
        .with_core("리스트레인트 링", "Special", 1, 0);
    let reporter = MockProgressReporter::new();
    let use_case = LookupCharacterUseCase::new(repository.clone(), reporter.clone());

    let character = use_case.execute(&query()).await.unwrap();

    assert_eq!(character.basic_info.as_ref().unwrap().character_level, 187);
    assert_eq!(character.guild_name, "메이플");
    assert_eq!(character.item_equipment.len(), 2);
    assert_eq!(character.vmatrix.skill.len(), 1);
    assert_eq!(character.vmatrix.enhancement.len(), 1);
    assert_eq!(character.vmatrix.special.len(), 1);
    assert_eq!(repository.identity_calls(), 1);
    assert_eq!(repository.completed_fetches(), 7);

    let mut fetched = reporter.fetched_categories();
    fetched.sort();
    assert_eq!(
        fetched,
        vec![
            "basic",
            "guild",
            "item-equipment",
            "pet-equipment",
            "skill-equipment",
            "stat",
            "vmatrix",
        ]
    );
    assert!(reporter.events().contains(&LookupEvent::Fetched {
        category: reporter.fetched_categories()[6].clone(),
        done: 7,
        total: 7,
    }));
    assert!(reporter.completed());
    assert!(reporter.failures().is_empty());
}

#[tokio::test]
async fn test_identity_failure_runs_no_fetcher() {
    let repository = MockCharacterRepository::new().with_identity_failure();
    let use_case = LookupCharacterUseCase::new(repository.clone(), MockProgressReporter::new());

    let err = use_case.execute(&query()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LookupError>(),
        Some(LookupError::NotFound { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::CharacterNotFound);
    assert_eq!(repository.fetch_calls(), 0);
}

#[tokio::test]
async fn test_single_fetch_failure_fails_whole_lookup() {
    let repository = MockCharacterRepository::new().with_failing_category("pet-equipment");
    let reporter = MockProgressReporter::new();
    let use_case = LookupCharacterUseCase::new(repository, reporter.clone());

    let err = use_case.execute(&query()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LookupError>(),
        Some(LookupError::UpstreamError { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::CharacterNotFound);
    assert!(!reporter.completed());
    assert_eq!(reporter.failures().len(), 1);
    assert!(!reporter
        .fetched_categories()
        .contains(&"pet-equipment".to_string()));
}

#[tokio::test]
async fn test_first_failure_cancels_slow_fetches() {
    let repository = MockCharacterRepository::new()
        .with_delay("basic", Duration::from_secs(30))
        .with_failing_category("vmatrix");
    let use_case = LookupCharacterUseCase::new(repository.clone(), MockProgressReporter::new());

    let started = std::time::Instant::now();
    let result = use_case.execute(&query()).await;

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(repository.fetch_calls(), 7);
    // Five fetches finished; the failing one and the slow one did not
    assert_eq!(repository.completed_fetches(), 5);
}

#[tokio::test]
async fn test_fetchers_run_concurrently() {
    let delay = Duration::from_millis(200);
    let repository = MockCharacterRepository::new()
        .with_delay("basic", delay)
        .with_delay("guild", delay)
        .with_delay("item-equipment", delay)
        .with_delay("pet-equipment", delay)
        .with_delay("skill-equipment", delay)
        .with_delay("stat", delay)
        .with_delay("vmatrix", delay);
    let use_case = LookupCharacterUseCase::new(repository, MockProgressReporter::new());

    let started = std::time::Instant::now();
    use_case.execute(&query()).await.unwrap();

    // Sequential fetching would take at least seven delays
    assert!(started.elapsed() < delay * 4);
}

#[tokio::test]
async fn test_repeated_lookups_produce_equal_view_models() {
    let repository = MockCharacterRepository::new()
        .with_guild("메이플")
        .with_stat("전투력", "1000");
    let use_case = LookupCharacterUseCase::new(repository.clone(), MockProgressReporter::new());

    let first = use_case.execute(&query()).await.unwrap();
    let second = use_case.execute(&query()).await.unwrap();

    assert_eq!(first, second);
    // Identity is re-resolved on every search
    assert_eq!(repository.identity_calls(), 2);
}

#[tokio::test]
async fn test_search_session_end_to_end() {
    let repository = MockCharacterRepository::new()
        .with_item("혈맹의 반지", "장비 장신구", "반지1")
        .with_item("유니온의 가호", "장비 엠블렘", "엠블렘")
        .with_item("앱솔랩스 숄더", "장비 어깨", "어깨")
        .with_item("검은 고양이", "Cash 모자", "모자")
        .with_pets(CharacterPetInfo {
            pet_1_name: Some("핑크빈".to_string()),
            pet_1_date_expire: Some("2024-05-13T00:00:00+09:00".to_string()),
            ..Default::default()
        });
    let use_case = LookupCharacterUseCase::new(repository, MockProgressReporter::new());

    let mut session = SearchSession::new();
    let query = session.submit("슬라임", World::Luna).unwrap();
    let outcome = use_case
        .execute(&query)
        .await
        .map(|character| {
            CharacterReadModelBuilder::build(&query, character, &MarkerTable::default(), now())
        });
    session.resolve(outcome);

    let model = session.read_model().unwrap();
    let labels: Vec<&str> = model.equipment_tags.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["혈반 있음", "가호 있음", "0앜 1앱"]);
    assert_eq!(model.display_equipment.len(), 3);
    assert_eq!(model.pet_urgency.len(), 1);
    assert_eq!(model.pet_urgency[0].days_remaining, 3);
    assert_eq!(session.share_query(), Some(query.to_query_string()));

    let markdown = MarkdownFormatter::new().format(model).unwrap();
    assert!(markdown.contains("- 핑크빈 `생명의 물`"));
}

#[tokio::test]
async fn test_search_session_failure_message() {
    let use_case = LookupCharacterUseCase::new(
        MockCharacterRepository::new().with_failing_category("guild"),
        MockProgressReporter::new(),
    );

    let mut session = SearchSession::new();
    let query = session.submit("핑크빈", World::Scania).unwrap();
    let outcome = use_case
        .execute(&query)
        .await
        .map(|character| {
            CharacterReadModelBuilder::build(&query, character, &MarkerTable::default(), now())
        });
    session.resolve(outcome);

    assert_eq!(session.failure_message(), Some("핑크빈은/는 없는 캐릭터에요!"));
    assert!(session.read_model().is_none());
    assert!(session.share_query().is_none());
}
