use banksampah_api::routes::health::{api_test, health_check};
use banksampah_api::routes::home::index;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn api_test_lists_endpoints() {
    let response = api_test().await;
    assert_eq!(response.0.status, "success");
    assert_eq!(response.0.endpoints["waste_types"], "/api/waste-types");
    assert_eq!(response.0.endpoints["register"], "/api/register (POST)");
}

#[tokio::test]
async fn landing_page_shows_demo_credentials() {
    let page = index().await.0;
    assert!(page.contains("Bank Sampah Bersih"));
    assert!(page.contains("admin@banksampah.com"));
    assert!(page.contains("/api/waste-types"));
}
