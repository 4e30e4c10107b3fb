use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use clima_api::models::Relation;
use clima_api::orm::testing::test_rocket;

#[rocket::async_test]
async fn test_relation_crud() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/relacao")
        .json(&json!({"id_sala": 1, "id_equipamento": 2}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.headers().get_one("Location"), Some("/relacao/1"));
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Relação criada com sucesso");

    let response = client.put("/relacao/1").json(&json!({"id_sala": 5})).dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);

    let response = client
        .put("/relacao/1")
        .json(&json!({"id_sala": 5, "id_equipamento": 6}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let relation: Relation = client
        .get("/relacao/1")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid relation JSON");
    assert_eq!(relation.room_id, 5);
    assert_eq!(relation.equipment_id, 6);

    let response = client.delete("/relacao/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Relação excluída com sucesso");

    let response = client.get("/relacao/1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["error"], "Relação não encontrada");
}
