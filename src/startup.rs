use crate::db::PgPool;
use crate::routes::{
    customer::customer::{
        create_customer, delete_customer, get_customer, list_customers, update_customer,
    },
    customer_product::customer_product::{
        create_customer_product, delete_customer_product, list_by_customer,
        list_customer_products, mark_as_serviced, update_customer_product,
    },
    employee::employee::{create_employee, delete_employee, list_employees, update_employee},
    health_check::health_check,
    inventory::inventory::{
        create_inventory_item, delete_inventory_item, list_inventory, update_inventory_item,
    },
};
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/**************************************************************/
// Application State to reuse the same code in main and tests
/***************************************************************/
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(port: u16, pool: PgPool) -> Result<Self, std::io::Error> {
        let listener = if port == 0 {
            TcpListener::bind("127.0.0.1:0")?
        } else {
            let address = format!("127.0.0.1:{}", port);
            TcpListener::bind(&address)?
        };

        let actual_port = listener.local_addr()?.port();

        let server = run_server(listener, pool.clone()).await?;
        Ok(Self {
            port: actual_port,
            server,
        })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/******************************************/
// Running Server
/******************************************/
pub async fn run_server(listener: TcpListener, pool: PgPool) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .route("/", web::get().to(health_check))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api/customers")
                    .route("", web::get().to(list_customers))
                    .route("", web::post().to(create_customer))
                    .route("/{id}", web::get().to(get_customer))
                    .route("/{id}", web::put().to(update_customer))
                    .route("/{id}", web::delete().to(delete_customer)),
            )
            .service(
                web::scope("/api/inventory")
                    .route("", web::get().to(list_inventory))
                    .route("", web::post().to(create_inventory_item))
                    .route("/{id}", web::put().to(update_inventory_item))
                    .route("/{id}", web::delete().to(delete_inventory_item)),
            )
            .service(
                web::scope("/api/employees")
                    .route("", web::get().to(list_employees))
                    .route("", web::post().to(create_employee))
                    .route("/{id}", web::put().to(update_employee))
                    .route("/{id}", web::delete().to(delete_employee)),
            )
            .service(
                web::scope("/api/customer-products")
                    .route("", web::get().to(list_customer_products))
                    .route("", web::post().to(create_customer_product))
                    .route("/mark-serviced/{id}", web::post().to(mark_as_serviced))
                    .route("/{customer_id}", web::get().to(list_by_customer))
                    .route("/{id}", web::put().to(update_customer_product))
                    .route("/{id}", web::delete().to(delete_customer_product)),
            )
    })
    .listen(listener)?
    .run();
    Ok(server)
}
