pub mod prefix_data;
