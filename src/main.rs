fn main() {
    copydeck::app::cli::run();
}
