#[tokio::main]
async fn main() {
    symptomscope::run().await;
}
