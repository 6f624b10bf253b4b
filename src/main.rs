fn main() {
    deploy_generator::app::cli::run();
}
