pub(crate) mod extract;
pub(crate) mod multimer;
pub(crate) mod pdb2fasta;
