#[actix_web::main]
async fn main() -> std::io::Result<()> {
    asset_management_server::run().await
}
