fn main() {
    shoo_fly_swat::main();
}
