use crate::helper::spawn_app;
use serde_json::{json, Value};
use uuid::Uuid;
use waterbiz::db::drop_database;

async fn create_item(app: &crate::helper::TestApp, name: &str) {
    let response = app
        .api_client
        .post(&format!("{}/api/inventory", &app.address))
        .json(&json!({
            "product_name": name,
            "quantity": 5,
            "purchase_price": 4500.0,
            "sale_price": 6200.0,
            "description": "RO machine, 8 litre",
            "updated_by": "asha",
            "product_type": "Machine",
            "product_make": "Aqua Squard"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Item added successfully");
}

async fn first_item_id(app: &crate::helper::TestApp) -> String {
    let response = app
        .api_client
        .get(&format!("{}/api/inventory", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: Value = response.json().await.unwrap();
    body[0]["product_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn created_items_show_up_in_the_listing() {
    //arrange
    let app = spawn_app().await;
    create_item(&app, "Aqua Purifier X2").await;

    //act
    let response = app
        .api_client
        .get(&format!("{}/api/inventory", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["product_name"], "Aqua Purifier X2");
    assert_eq!(listed[0]["product_type"], "Machine");
    assert_eq!(listed[0]["product_make"], "Aqua Squard");
    assert_eq!(listed[0]["quantity"], 5);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn an_unknown_product_type_is_rejected() {
    //arrange
    let app = spawn_app().await;

    //act
    let response = app
        .api_client
        .post(&format!("{}/api/inventory", &app.address))
        .json(&json!({
            "product_name": "Aqua Purifier X2",
            "quantity": 5,
            "purchase_price": 4500.0,
            "sale_price": 6200.0,
            "product_type": "Gadget",
            "product_make": "Kent"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 400);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn update_replaces_the_stored_item() {
    //arrange
    let app = spawn_app().await;
    create_item(&app, "Aqua Purifier X2").await;
    let product_id = first_item_id(&app).await;

    //act
    let response = app
        .api_client
        .put(&format!("{}/api/inventory/{}", &app.address, product_id))
        .json(&json!({
            "product_name": "Aqua Purifier X3",
            "quantity": 2,
            "purchase_price": 5000.0,
            "sale_price": 6900.0,
            "product_type": "Machine",
            "product_make": "Kent"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert: omitted description/updated_by became null, the rest replaced
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Item updated successfully");

    let listing = app
        .api_client
        .get(&format!("{}/api/inventory", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let listing_body: Value = listing.json().await.unwrap();
    assert_eq!(listing_body[0]["product_name"], "Aqua Purifier X3");
    assert_eq!(listing_body[0]["quantity"], 2);
    assert_eq!(listing_body[0]["product_make"], "Kent");
    assert!(listing_body[0]["description"].is_null());
    drop_database(&app.database_name);
}

#[tokio::test]
async fn updating_a_missing_item_returns_404() {
    //arrange
    let app = spawn_app().await;

    //act
    let response = app
        .api_client
        .put(&format!("{}/api/inventory/{}", &app.address, Uuid::new_v4()))
        .json(&json!({
            "product_name": "Ghost Item",
            "quantity": 1,
            "purchase_price": 100.0,
            "sale_price": 150.0,
            "product_type": "Spare",
            "product_make": "Aquafina"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 404);
    drop_database(&app.database_name);
}

#[tokio::test]
async fn deleting_twice_returns_404_the_second_time() {
    //arrange
    let app = spawn_app().await;
    create_item(&app, "Aqua Purifier X2").await;
    let product_id = first_item_id(&app).await;

    //act
    let first = app
        .api_client
        .delete(&format!("{}/api/inventory/{}", &app.address, product_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let second = app
        .api_client
        .delete(&format!("{}/api/inventory/{}", &app.address, product_id))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 404);
    drop_database(&app.database_name);
}
