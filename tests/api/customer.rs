use crate::helper::spawn_app;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::{json, Value};
use uuid::Uuid;
use waterbiz::db::drop_database;

#[tokio::test]
async fn create_customer_returns_the_persisted_record() {
    //arrange
    let app = spawn_app().await;

    //act
    let response = app
        .api_client
        .post(&format!("{}/api/customers", &app.address))
        .json(&json!({
            "name": "Asha Nair",
            "primary_mobile": "9876543210",
            "secondary_mobile": "9123456780",
            "address": "12 Lake Road, Kochi",
            "map_location": "https://maps.example.com/asha"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Asha Nair");
    assert_eq!(body["primary_mobile"], "9876543210");
    assert_eq!(body["secondary_mobile"], "9123456780");
    assert_eq!(body["address"], "12 Lake Road, Kochi");
    assert!(body["customer_id"].as_str().is_some());

    let customer_id = body["customer_id"].as_str().unwrap();
    let fetched = app
        .api_client
        .get(&format!("{}/api/customers/{}", &app.address, customer_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(fetched.status().as_u16(), 200);
    let fetched_body: Value = fetched.json().await.unwrap();
    assert_eq!(fetched_body["name"], "Asha Nair");
    drop_database(&app.database_name);
}

#[tokio::test]
async fn a_nine_digit_mobile_is_rejected_and_nothing_is_stored() {
    use waterbiz::schema::customers::dsl::*;

    //arrange
    let app = spawn_app().await;

    //act
    let response = app
        .api_client
        .post(&format!("{}/api/customers", &app.address))
        .json(&json!({
            "name": "Asha Nair",
            "primary_mobile": "987654321",
            "address": "12 Lake Road, Kochi"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 400);
    let mut conn = app.db_pool.get().await.unwrap();
    let stored: i64 = customers.count().get_result(&mut conn).await.unwrap();
    assert_eq!(stored, 0);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn updating_a_missing_customer_returns_404() {
    //arrange
    let app = spawn_app().await;

    //act
    let response = app
        .api_client
        .put(&format!("{}/api/customers/{}", &app.address, Uuid::new_v4()))
        .json(&json!({
            "name": "Nobody",
            "primary_mobile": "9876543210",
            "address": "Nowhere"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 404);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn update_overwrites_every_field() {
    //arrange
    let app = spawn_app().await;
    let created = app
        .api_client
        .post(&format!("{}/api/customers", &app.address))
        .json(&json!({
            "name": "Asha Nair",
            "primary_mobile": "9876543210",
            "secondary_mobile": "9123456780",
            "address": "12 Lake Road, Kochi",
            "map_location": "https://maps.example.com/asha"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    let created_body: Value = created.json().await.unwrap();
    let customer_id = created_body["customer_id"].as_str().unwrap().to_string();

    //act: secondary_mobile and map_location are omitted on purpose
    let response = app
        .api_client
        .put(&format!("{}/api/customers/{}", &app.address, customer_id))
        .json(&json!({
            "name": "Asha Menon",
            "primary_mobile": "9876500000",
            "address": "44 Hill Street, Kochi"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert: full replacement, omitted optional fields became null
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Asha Menon");
    assert_eq!(body["primary_mobile"], "9876500000");
    assert_eq!(body["address"], "44 Hill Street, Kochi");
    assert!(body["secondary_mobile"].is_null());
    assert!(body["map_location"].is_null());
    drop_database(&app.database_name);
}

#[tokio::test]
async fn deleting_twice_returns_404_the_second_time() {
    //arrange
    let app = spawn_app().await;
    let created = app
        .api_client
        .post(&format!("{}/api/customers", &app.address))
        .json(&json!({
            "name": "Asha Nair",
            "primary_mobile": "9876543210",
            "address": "12 Lake Road, Kochi"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    let created_body: Value = created.json().await.unwrap();
    let customer_id = created_body["customer_id"].as_str().unwrap().to_string();

    //act
    let first = app
        .api_client
        .delete(&format!("{}/api/customers/{}", &app.address, customer_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let second = app
        .api_client
        .delete(&format!("{}/api/customers/{}", &app.address, customer_id))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(first.status().as_u16(), 200);
    let first_body: Value = first.json().await.unwrap();
    assert_eq!(first_body["message"], "Customer deleted");
    assert_eq!(first_body["deleted"]["name"], "Asha Nair");
    assert_eq!(second.status().as_u16(), 404);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn listing_returns_newest_first() {
    //arrange
    let app = spawn_app().await;
    for name in ["First Customer", "Second Customer"] {
        let response = app
            .api_client
            .post(&format!("{}/api/customers", &app.address))
            .json(&json!({
                "name": name,
                "primary_mobile": "9876543210",
                "address": "12 Lake Road, Kochi"
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);
    }

    //act
    let response = app
        .api_client
        .get(&format!("{}/api/customers", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Second Customer");
    assert_eq!(listed[1]["name"], "First Customer");
    drop_database(&app.database_name);
}
