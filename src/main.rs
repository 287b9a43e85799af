use zoom_lens::components::App;

fn main() {
    zoom_lens::util::init_logging();
    yew::Renderer::<App>::new().render();
}
