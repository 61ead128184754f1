fn main() {
    ordtrack::app::cli::run();
}
