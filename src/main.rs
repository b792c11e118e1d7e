fn main() {
    tsxgen::app::cli::run();
}
