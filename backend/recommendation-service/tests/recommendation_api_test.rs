use actix_web::{test, web, App};

use recommendation_service::app_state::AppState;
use recommendation_service::artifacts::{self, BookRatings, RatingsArtifact};
use recommendation_service::config::Config;
use recommendation_service::models::{HealthResponse, RecommendationResponse};
use recommendation_service::routes::configure_routes;
use recommendation_service::services::BookRecord;

fn sample_ratings() -> RatingsArtifact {
    // Dune and Foundation are near-identical rating vectors, Neuromancer
    // is dissimilar.
    RatingsArtifact {
        user_ids: vec!["u1".into(), "u2".into(), "u3".into(), "u4".into()],
        books: vec![
            BookRatings {
                title: "Dune".into(),
                ratings: vec![5.0, 4.0, 0.0, 5.0],
            },
            BookRatings {
                title: "Foundation".into(),
                ratings: vec![5.0, 4.0, 0.0, 4.0],
            },
            BookRatings {
                title: "Neuromancer".into(),
                ratings: vec![0.0, 1.0, 5.0, 0.0],
            },
        ],
    }
}

fn sample_catalog() -> Vec<BookRecord> {
    serde_json::from_str(
        r#"[
            {"title": "Dune", "image_url": "http://images.example/dune.jpg",
             "year": 1965, "publisher": "Chilton Books",
             "author": "Frank Herbert", "avg_rating": 4.2},
            {"title": "Foundation", "image_url": "http://images.example/foundation.jpg",
             "year": "1951", "publisher": "Gnome Press",
             "author": "Isaac Asimov", "avg_rating": 4.4},
            {"title": "Neuromancer", "image_url": "http://images.example/neuromancer.jpg",
             "year": 1984, "publisher": "Ace",
             "author": "William Gibson", "avg_rating": 3.9}
        ]"#,
    )
    .unwrap()
}

fn loaded_state() -> AppState {
    let context = artifacts::build_context(sample_ratings(), sample_catalog(), 20).unwrap();
    AppState::new(Config::from_env(), Some(context))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_model_loaded() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());

    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "ok");
    assert!(body.model_loaded);
    assert!(body.service_capabilities.recommendations);
    assert!(body.service_capabilities.book_list);
}

#[actix_web::test]
async fn health_reports_limited_mode() {
    let app = init_app!(AppState::disabled(Config::from_env()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());

    let body: HealthResponse = test::read_body_json(resp).await;
    assert!(!body.model_loaded);
    assert!(!body.service_capabilities.recommendations);
}

#[actix_web::test]
async fn books_lists_all_titles_without_query() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/books").to_request()).await;
    assert!(resp.status().is_success());

    let titles: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(titles, vec!["Dune", "Foundation", "Neuromancer"]);
}

#[actix_web::test]
async fn books_filters_with_fuzzy_query() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/books?query=fond").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let titles: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(titles, vec!["Foundation"]);
}

#[actix_web::test]
async fn books_answers_503_when_disabled() {
    let app = init_app!(AppState::disabled(Config::from_env()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/books").to_request()).await;
    assert_eq!(resp.status().as_u16(), 503);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
}

#[actix_web::test]
async fn recommend_returns_scored_neighbors() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/recommend/Dune?num_recommendations=2")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: RecommendationResponse = test::read_body_json(resp).await;
    assert_eq!(body.searched_book.title, "Dune");
    assert_eq!(body.searched_book.author.as_deref(), Some("Frank Herbert"));
    assert!(body.searched_book.confidence.is_none());

    let titles: Vec<&str> = body
        .recommendations
        .iter()
        .map(|info| info.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Foundation", "Neuromancer"]);

    let confidences: Vec<f64> = body
        .recommendations
        .iter()
        .map(|info| info.confidence.unwrap())
        .collect();
    assert!(confidences[0] > confidences[1]);
    assert!((confidences.iter().sum::<f64>() - 1.0).abs() < 1e-3);
}

#[actix_web::test]
async fn recommend_uses_default_count() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/recommend/Dune").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // Default count is 5 but only two non-self neighbors exist.
    let body: RecommendationResponse = test::read_body_json(resp).await;
    assert_eq!(body.recommendations.len(), 2);
}

#[actix_web::test]
async fn recommend_unknown_title_is_404() {
    let app = init_app!(loaded_state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/recommend/Hyperion")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn recommend_rejects_out_of_range_count() {
    let app = init_app!(loaded_state());

    for count in ["0", "21"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/recommend/Dune?num_recommendations={count}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 400, "count = {count}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_ARGUMENT");
    }
}

#[actix_web::test]
async fn recommend_answers_503_when_disabled() {
    let app = init_app!(AppState::disabled(Config::from_env()));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/recommend/Dune").to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 503);
}
