mod bell_tests;
