/// Welcome text shown before the test starts.
pub const INTRO_MARKDOWN: &str = r#"**Welcome to the Visual Turing Test for Vitreous OCT Images!**

This test assesses whether images enhanced by generative models may have clinical
relevance and help ophthalmologists make even more accurate diagnoses.

The test consists of two phases:

1. Comparing pairs of images, one real OCT image and one generated by a diffusion model,
   and selecting the one you think is the real OCT image.
2. Looking at pairs of images, one ART10 and one enhanced version generated by a model,
   and assessing whether the anatomical structures present in the ART10 image have been
   preserved in the generated enhanced version, noting any additional issues you see in
   the generated image.

There is no time restriction during the test.

Please answer to the best of your ability. Your responses will be invaluable for our research.

At the end of the test, click **Download Results** and send the saved `.csv` file to the
study coordinators.
"#;
