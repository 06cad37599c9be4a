mod application;
mod management;
mod royalty;
mod user;

use super::*;
