pub mod marker_utils;
