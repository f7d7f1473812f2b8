fn main() {
    mkcomponent::app::cli::run();
}
