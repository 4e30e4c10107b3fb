use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use clima_api::models::Command;
use clima_api::orm::testing::test_rocket;

async fn command_count(client: &Client) -> usize {
    let commands: Vec<Command> = client
        .get("/comandos")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid JSON array");
    commands.len()
}

#[rocket::async_test]
async fn test_full_update_replaces_every_field() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/comandos")
        .json(&json!({"comando": "PWR_ON", "descricao": "Liga", "id_protocolo": 1}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Comando criado com sucesso");
    let id = body["id"].as_i64().expect("numeric id");

    let response = client
        .put(format!("/comandos/{}", id))
        .json(&json!({"comando": "PWR_OFF", "descricao": "Desliga", "id_protocolo": 2}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body["message"], "Comando atualizado com sucesso");

    let command: Command = client
        .get(format!("/comandos/{}", id))
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid command JSON");
    assert_eq!(command.command_text, "PWR_OFF");
    assert_eq!(command.description, "Desliga");
    assert_eq!(command.protocol_id, 2);
}

#[rocket::async_test]
async fn test_full_update_with_subset_is_bad_request() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/comandos")
        .json(&json!({"comando": "PWR_ON", "descricao": "Liga", "id_protocolo": 1}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);

    let response = client
        .put("/comandos/1")
        .json(&json!({"comando": "PWR_OFF"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let command: Command = client
        .get("/comandos/1")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("valid command JSON");
    assert_eq!(command.command_text, "PWR_ON");
}

#[rocket::async_test]
async fn test_delete_missing_command_leaves_table_unchanged() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    for text in ["PWR_ON", "PWR_OFF"] {
        let response = client
            .post("/comandos")
            .json(&json!({"comando": text, "descricao": "", "id_protocolo": 1}))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Created);
    }
    assert_eq!(command_count(&client).await, 2);

    let response = client.delete("/comandos/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON response");
    assert_eq!(body, json!({"error": "Comando não encontrado"}));

    assert_eq!(command_count(&client).await, 2);
}
