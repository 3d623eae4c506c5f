pub mod hull_vis2d;
