use sounddrift_site::app;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}
