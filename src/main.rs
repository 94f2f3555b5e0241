fn main() {
    marketplace_admin::run();
}
