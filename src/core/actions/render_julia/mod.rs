pub mod render_julia;
