fn main() {
    classwriter::app::cli::run();
}
