use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use clima_api::orm::testing::test_rocket;

#[rocket::async_test]
async fn test_log_create_partial_update_delete() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/logs")
        .json(&json!({
            "datas": "2024-03-18",
            "hora": "08:05:00",
            "equipamento": "Split 12000",
            "id_equipamento": 2,
            "usuario": "Ana",
            "sala": "Lab 1",
            "acao": "ligar"
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Log criado com sucesso!");
    let id = body["id"].as_i64().expect("numeric id");

    let response = client
        .put(format!("/logs/{}", id))
        .json(&json!({"acao": "desligar", "hora": "09:45:00"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let entry: Value = client
        .get(format!("/logs/{}", id))
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid JSON response");
    assert_eq!(entry["acao"], "desligar");
    assert_eq!(entry["hora"], "09:45:00");
    assert_eq!(entry["datas"], "2024-03-18");
    assert_eq!(entry["usuario"], "Ana");

    let response = client.delete(format!("/logs/{}", id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let logs: Value = client.get("/logs").dispatch().await.into_json().await.expect("JSON");
    assert_eq!(logs, json!([]));
}

#[rocket::async_test]
async fn test_log_not_found() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/logs/3").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["error"], "Log não encontrado");
}
