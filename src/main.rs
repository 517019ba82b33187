fn main() {
    ppk::app::cli::run();
}
