fn main() {
    cfsetup::app::cli::sync_submodules::run();
}
