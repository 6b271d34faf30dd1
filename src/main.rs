fn main() {
    buildinfo::app::startup::startup();
}
