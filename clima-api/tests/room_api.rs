use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use clima_api::models::Room;
use clima_api::orm::testing::test_rocket;

async fn create_room(client: &Client, body: Value) -> i32 {
    let response = client.post("/salas").json(&body).dispatch().await;
    assert_eq!(response.status(), Status::Created);
    let created: Value = response.into_json().await.expect("valid JSON response");
    created["id"].as_i64().expect("numeric id") as i32
}

#[rocket::async_test]
async fn test_create_room_returns_created_with_location() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/salas")
        .json(&json!({"descricao": "Lab 1", "andar": "2", "bloco": "B", "ip": "10.0.0.5"}))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.headers().get_one("Location"), Some("/salas/1"));
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Sala criada com sucesso!");
    assert_eq!(body["id"], 1);

    let response = client.get("/salas/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let room: Room = response.into_json().await.expect("valid room JSON");
    assert_eq!(room.description, "Lab 1");
    assert_eq!(room.floor, "2");
    assert_eq!(room.block, "B");
    assert_eq!(room.ip, "10.0.0.5");
}

#[rocket::async_test]
async fn test_list_rooms() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/salas").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some("[]"));

    create_room(&client, json!({"descricao": "Lab 1", "andar": "1", "bloco": "A", "ip": "10.0.0.1"})).await;
    create_room(&client, json!({"descricao": "Lab 2", "andar": "1", "bloco": "A", "ip": "10.0.0.2"})).await;

    let response = client.get("/salas").dispatch().await;
    let rooms: Vec<Room> = response.into_json().await.expect("valid JSON array");
    let descriptions: Vec<_> = rooms.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Lab 1", "Lab 2"]);
}

#[rocket::async_test]
async fn test_partial_update_keeps_other_fields() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let id = create_room(
        &client,
        json!({"descricao": "Lab 1", "andar": "2", "bloco": "B", "ip": "10.0.0.5"}),
    )
    .await;

    let response = client
        .put(format!("/salas/{}", id))
        .json(&json!({"ip": "10.0.0.9"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body, json!({"message": "Sala atualizada com sucesso!"}));

    let room: Room = client
        .get(format!("/salas/{}", id))
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid room JSON");
    assert_eq!(room.ip, "10.0.0.9");
    assert_eq!(room.description, "Lab 1");
    assert_eq!(room.floor, "2");
    assert_eq!(room.block, "B");
}

#[rocket::async_test]
async fn test_empty_update_succeeds_without_changes() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let id = create_room(
        &client,
        json!({"descricao": "Lab 1", "andar": "2", "bloco": "B", "ip": "10.0.0.5"}),
    )
    .await;

    let response = client.put(format!("/salas/{}", id)).json(&json!({})).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.put("/salas/42").json(&json!({})).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_update_with_unknown_key_is_rejected() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let id = create_room(
        &client,
        json!({"descricao": "Lab 1", "andar": "2", "bloco": "B", "ip": "10.0.0.5"}),
    )
    .await;

    let response = client
        .put(format!("/salas/{}", id))
        .json(&json!({"id": 99, "descricao": "Lab X"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let room: Room = client
        .get(format!("/salas/{}", id))
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid room JSON");
    assert_eq!(room.id, id);
    assert_eq!(room.description, "Lab 1");
}

#[rocket::async_test]
async fn test_create_room_missing_field_is_bad_request() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/salas")
        .json(&json!({"descricao": "Lab 1", "andar": "2", "bloco": "B"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["status"], 400);
    assert_eq!(body["path"], "/salas");
    assert!(body["detail"].as_str().unwrap_or_default().contains("ip"));

    let rooms: Vec<Room> = client.get("/salas").dispatch().await.into_json().await.expect("array");
    assert!(rooms.is_empty());
}

#[rocket::async_test]
async fn test_malformed_json_is_bad_request() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/salas")
        .header(ContentType::JSON)
        .body("{\"descricao\": ")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn test_delete_room() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let id = create_room(
        &client,
        json!({"descricao": "Lab 1", "andar": "2", "bloco": "B", "ip": "10.0.0.5"}),
    )
    .await;

    let response = client.delete(format!("/salas/{}", id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Sala excluída com sucesso!");

    let response = client.get(format!("/salas/{}", id)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body, json!({"error": "Sala não encontrada"}));

    let response = client.delete(format!("/salas/{}", id)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}
