fn main() {
    cfsetup::app::cli::create_venv::run();
}
