use bug_tracker::App;

fn main() {
    dioxus::launch(App);
}
